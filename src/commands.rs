pub mod generate;
pub mod init;
