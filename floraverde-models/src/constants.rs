/// Default configuration file name, looked up in the working directory
/// when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "floraverde.toml";
