mod ini_processor;

pub use ini_processor::IniProcessor;
