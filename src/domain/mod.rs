//! Domain types for the member and workout-session resources.
//!
//! Each resource has a row type (what the API returns) and payload types
//! (what it accepts), with validation rules declared on the payloads.

pub mod member;
pub mod session;

pub use member::{Member, MemberUpdate, NewMember};
pub use session::{MissingField, SessionFields, SessionPayload, WorkoutSession};
