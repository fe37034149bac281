pub mod formatter;
pub mod markdown;

pub use formatter::{
    format_project_detail, format_project_list, format_ranked_table, format_score, format_tsv,
    rank_projects, should_use_colors, RankedProject,
};
pub use markdown::{
    describe_rating, format_header, format_header_at, format_no_projects_message, format_project,
    format_report, score_label, NO_PROJECTS_MESSAGE,
};
