pub mod controls;
pub mod projects_form;
pub mod theme;
