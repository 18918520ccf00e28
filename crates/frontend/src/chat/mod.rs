pub mod view;

pub use view::ChatWindow;
