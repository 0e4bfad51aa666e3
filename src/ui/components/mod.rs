pub mod dialog_utils;
pub mod empty_state;
pub mod filter_tabs;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod path_dialog;
pub mod task_input;
pub mod task_list;
pub mod toast;
