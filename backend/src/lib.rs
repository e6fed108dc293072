pub mod config;
pub mod data_setup;
pub mod db;
pub mod entities;
pub mod logger;
pub mod meta;

use std::fs::create_dir_all;
use std::path::PathBuf;
use std::error::Error;
use app_dirs::{get_app_root, AppDataType, AppInfo};

pub const APP_INFO: AppInfo = AppInfo { name: "pricing", author: "yg" };

/// The user data directory of the application, created if missing.
pub fn get_create_app_root() -> Result<PathBuf, Box<dyn Error>> {
    let p = get_app_root(AppDataType::UserData, &APP_INFO)?;
    if !p.exists() {
        create_dir_all(&p)?;
    }
    Ok(p)
}
