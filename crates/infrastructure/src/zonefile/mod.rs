pub mod discovery;
pub mod loader;
pub mod parser;
pub mod scanner;
pub mod token;

pub use discovery::discover_zone_files;
pub use loader::FileZoneSource;
pub use parser::{parse_zone, Parser};
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
