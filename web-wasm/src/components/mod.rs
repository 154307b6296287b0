pub mod hero;
pub mod floating_shapes;
pub mod stats_counter;
pub mod reveal;
pub mod team_directory;
pub mod department_filter;
pub mod member_card;
pub mod member_modal;
