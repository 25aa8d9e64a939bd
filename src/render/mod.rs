//! Text and JSON rendering of trees, lists, and single groups.

pub mod format;

pub use format::{
    format_group_detail_json, format_group_detail_text, format_list_json, format_list_text,
    format_modified_date, format_section_heading, format_tree_json, format_tree_text,
    EMPTY_PROJECT_MESSAGE,
};
