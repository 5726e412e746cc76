pub mod engine;
pub mod fetcher;
pub mod parser;
pub mod scorer;

pub use crate::domain::model::{Credential, FrequencyTable, NumberPair, RawInput, Report};
pub use crate::domain::ports::{ConfigProvider, InputSource};
pub use crate::utils::error::Result;
