pub mod view;

pub use view::DocumentPanel;
