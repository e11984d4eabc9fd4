pub mod markup;
pub mod theme;
pub mod view;
