pub mod core;
pub mod models;
pub mod assembly;

pub use assembly::assembler::UserAssembler;
pub use core::error::{AssemblyError, RecordError};
pub use models::basic_user::BasicUser;
pub use models::guild::BasicGuild;
pub use models::record::{Record, Scalar};
pub use models::sink::{LogSink, MemorySink, TracingSink};
pub use models::user::User;
