pub mod compositor;
pub mod geometry;
pub mod registry;
pub mod scanner;
pub mod surface;
pub mod template;
pub mod validator;
