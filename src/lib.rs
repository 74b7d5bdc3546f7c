pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;

pub use config::Config;
pub use db::{init_db, init_db_with_pool_size, Repository};
pub use domain::{Member, MemberUpdate, NewMember, SessionFields, SessionPayload, WorkoutSession};
pub use error::AppError;
