//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::{FileType, ToastKind};

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUp as ArrowUp, LuCheck as Check, LuChevronDown as ChevronDown,
        LuChevronRight as ChevronRight, LuChevronsDownUp as Collapse,
        LuChevronsUpDown as Expand, LuCircleCheck as Success, LuCircleX as Failure,
        LuCode as Code, LuCopy as Copy, LuDownload as Download, LuExternalLink as ExternalLink,
        LuEye as Watching, LuEyeOff as NotWatching, LuFile as File, LuFileCode as FileCode,
        LuFileText as FileText, LuFolder as Folder, LuFolderOpen as FolderOpen, LuHouse as Home,
        LuInfo as Info, LuList as List, LuListTree as Tree, LuMoon as Moon,
        LuRefreshCw as Refresh, LuSearch as Search, LuSun as Sun, LuTriangleAlert as Warning,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsArrowUp as ArrowUp, BsArrowsCollapse as Collapse,
        BsArrowsExpand as Expand, BsBoxArrowUpRight as ExternalLink, BsCheckCircleFill as Success,
        BsCheckLg as Check, BsChevronDown as ChevronDown, BsChevronRight as ChevronRight,
        BsClipboard as Copy, BsCodeSlash as Code, BsDiagram3 as Tree, BsDownload as Download,
        BsExclamationTriangleFill as Warning, BsEye as Watching, BsEyeSlash as NotWatching,
        BsFileEarmark as File, BsFileEarmarkCode as FileCode, BsFileEarmarkText as FileText,
        BsFolder2Open as FolderOpen, BsFolderFill as Folder, BsHouseFill as Home,
        BsInfoCircleFill as Info, BsListUl as List, BsMoonFill as Moon, BsSearch as Search,
        BsSunFill as Sun, BsXCircleFill as Failure, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(HOME, Home);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_CODE, FileCode);
themed_icon!(SEARCH, Search);
themed_icon!(LIST, List);
themed_icon!(TREE, Tree);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(DOWNLOAD, Download);
themed_icon!(COPY, Copy);
themed_icon!(CHECK, Check);
themed_icon!(COLLAPSE, Collapse);
themed_icon!(EXPAND, Expand);
themed_icon!(CODE, Code);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(REFRESH, Refresh);
themed_icon!(WATCHING, Watching);
themed_icon!(NOT_WATCHING, NotWatching);
themed_icon!(ARROW_UP, ArrowUp);
themed_icon!(INFO, Info);
themed_icon!(SUCCESS, Success);
themed_icon!(WARNING, Warning);
themed_icon!(FAILURE, Failure);

/// Icon for a manifest leaf.
pub fn file_icon(file_type: FileType) -> Icon {
    match file_type {
        FileType::Markdown | FileType::Text => FILE_TEXT,
        FileType::Html | FileType::Json => FILE_CODE,
        FileType::Unknown => FILE,
    }
}

/// Icon shown next to a toast heading.
pub fn toast_icon(kind: ToastKind) -> Icon {
    match kind {
        ToastKind::Info => INFO,
        ToastKind::Success => SUCCESS,
        ToastKind::Warning => WARNING,
        ToastKind::Error => FAILURE,
    }
}
