mod popup;

pub use popup::PopupDialog;
