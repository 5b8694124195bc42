mod all;
mod categories;
mod content;
mod footer;
mod header;
mod log;
mod screens;

use self::log::log;
use super::*;
use categories::categories;
use content::content;
use footer::footer;
use header::header;
use screens::screens;

pub use all::all as render;
