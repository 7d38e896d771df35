//! The builtin split plan.
//!
//! This is the mapping the tool was originally built to automate: carving a
//! monolithic admin module into per-concern modules. It is configuration
//! data, not logic; pass `--plan` to replace it wholesale.

use crate::plan::{GroupSpec, SplitPlan};

const ZONES_HEADER: &str = r#"// Zone management functionality
#[cfg(feature = "admin")]
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
};

#[cfg(feature = "admin")]
use sqlx::Row;
#[cfg(feature = "admin")]
use urlencoding;

#[cfg(feature = "admin")]
use crate::AppState;
#[cfg(feature = "admin")]
use crate::admin::types::*;
#[cfg(feature = "admin")]
use crate::admin::dashboard::{generate_sortable_header, get_distinct_zone_types, get_distinct_expansions, generate_expansion_options, generate_zone_type_options};

"#;

const INSTANCES_HEADER: &str = r#"// Instance management functionality
#[cfg(feature = "admin")]
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
};

#[cfg(feature = "admin")]
use sqlx::Row;
#[cfg(feature = "admin")]
use urlencoding;

#[cfg(feature = "admin")]
use crate::AppState;
#[cfg(feature = "admin")]
use crate::admin::types::*;
#[cfg(feature = "admin")]
use crate::admin::dashboard::generate_sortable_header;

"#;

const NOTES_HEADER: &str = r#"// Note types management functionality
#[cfg(feature = "admin")]
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
};

#[cfg(feature = "admin")]
use crate::AppState;
#[cfg(feature = "admin")]
use crate::admin::types::*;

"#;

const FLAGS_HEADER: &str = r#"// Flag types management functionality
#[cfg(feature = "admin")]
use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
};

#[cfg(feature = "admin")]
use sqlx::Row;

#[cfg(feature = "admin")]
use crate::AppState;
#[cfg(feature = "admin")]
use crate::admin::types::*;

"#;

const RATINGS_HEADER: &str = r#"// Rating management functionality
#[cfg(feature = "admin")]
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
};

#[cfg(feature = "admin")]
use std::collections::HashMap;
#[cfg(feature = "admin")]
use sqlx::Row;
#[cfg(feature = "admin")]
use urlencoding;

#[cfg(feature = "admin")]
use crate::AppState;
#[cfg(feature = "admin")]
use crate::admin::types::*;
#[cfg(feature = "admin")]
use crate::admin::dashboard::generate_sortable_header;

"#;

const LINKS_HEADER: &str = r#"// Link management functionality
#[cfg(feature = "admin")]
use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
};

#[cfg(feature = "admin")]
use sqlx::Row;
#[cfg(feature = "admin")]
use urlencoding;

#[cfg(feature = "admin")]
use crate::AppState;
#[cfg(feature = "admin")]
use crate::admin::types::*;
#[cfg(feature = "admin")]
use crate::admin::dashboard::generate_sortable_header;

"#;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl SplitPlan {
    /// The compiled-in default plan.
    pub fn builtin() -> SplitPlan {
        SplitPlan {
            groups: vec![
                GroupSpec::new(
                    "zones.rs",
                    names(&[
                        "list_zones",
                        "new_zone_form",
                        "edit_zone_form",
                        "create_zone",
                        "update_zone",
                        "delete_zone",
                        "handle_zone_update_or_delete",
                        "move_zone_to_instances",
                        "zone_ratings",
                        "zone_notes",
                        "create_zone_note",
                        "delete_zone_note",
                        "create_zone_flag",
                        "delete_zone_flag",
                        "delete_zone_flag_simple",
                        "get_zone_form_header",
                        "get_zone_form_body",
                        "get_zone_form_body_with_notes",
                        "get_zone_form_body_with_notes_and_flags",
                    ]),
                )
                .with_header(ZONES_HEADER),
                GroupSpec::new(
                    "instances.rs",
                    names(&[
                        "list_instances",
                        "edit_instance_form",
                        "handle_instance_update_or_delete",
                        "update_instance",
                        "delete_instance",
                        "instance_notes",
                        "create_instance_note",
                        "delete_instance_note",
                        "get_instance_form_header",
                        "get_instance_form_body",
                    ]),
                )
                .with_header(INSTANCES_HEADER),
                GroupSpec::new(
                    "notes.rs",
                    names(&["list_note_types", "create_note_type", "delete_note_type"]),
                )
                .with_header(NOTES_HEADER),
                GroupSpec::new(
                    "flags.rs",
                    names(&[
                        "list_flag_types",
                        "create_flag_type",
                        "edit_flag_type_form",
                        "update_flag_type",
                        "delete_flag_type",
                    ]),
                )
                .with_header(FLAGS_HEADER),
                GroupSpec::new(
                    "ratings.rs",
                    names(&[
                        "list_all_ratings",
                        "delete_rating_admin",
                        "handle_rating_delete",
                    ]),
                )
                .with_header(RATINGS_HEADER),
                GroupSpec::new(
                    "links.rs",
                    names(&[
                        "list_links",
                        "new_link_form",
                        "edit_link_form",
                        "create_link_admin",
                        "handle_link_update_or_delete",
                        "update_link_admin",
                        "delete_link_admin",
                    ]),
                )
                .with_header(LINKS_HEADER),
            ],
        }
    }
}
