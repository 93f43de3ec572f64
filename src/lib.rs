pub mod autoload;
