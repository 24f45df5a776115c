pub mod view_ops;
