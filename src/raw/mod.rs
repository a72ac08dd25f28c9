mod level;

pub(crate) use level::RawLevel;
