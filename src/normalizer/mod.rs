//! Projection of raw Voyager payloads into the stable output schema
//!
//! # Error Handling Strategy
//!
//! Normalization is total: every function here takes already-fetched JSON and
//! returns a value, never a `Result`.
//!
//! - **Missing structure**: an absent key, a `null`, or a value of the wrong JSON
//!   type at any depth degrades to the field's default (`""`, `false`, `None`,
//!   empty list). A sparsely populated but authenticated payload still renders.
//!
//! - **Tagged unions**: Voyager nests real data under namespace-qualified type
//!   keys (`com.linkedin.voyager.messaging.MessagingMember`). When the expected tag
//!   is missing the whole union is treated as absent and everything beneath it
//!   defaults, see [`union::union_member`].
//!
//! - **No I/O**: the authenticated user's identifier is an input, resolved once by
//!   the caller, rather than something fetched while normalizing.

pub mod conversations;
pub mod profile;
pub mod union;

pub use conversations::{conversation_id_from_urn, normalize_conversation, normalize_conversations};
pub use profile::{normalize_profile_summary, public_identifier};
