pub mod badge;
pub mod progress_bar;
pub mod skeleton;
pub mod stacked_bar;
pub mod stat_card;
pub mod zebra_table;
