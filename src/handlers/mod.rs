pub mod health;
pub mod rooms;
pub mod shortest_path;

pub use health::health_handler;
pub use rooms::rooms_handler;
pub use shortest_path::shortest_path_handler;
