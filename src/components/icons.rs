//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ChevronDown, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuCircleAlert as Failure, LuCircleCheck as Success,
        LuDownload as Download, LuExpand as Expand, LuEye as Eye, LuFileText as FileText,
        LuHeart as Heart, LuImage as Image, LuLayoutGrid as Grid, LuList as List, LuMail as Mail,
        LuPackage as Package, LuPlay as Play, LuPlus as Plus, LuRocket as Rocket,
        LuSearch as Search, LuShare2 as Share, LuShield as Shield, LuTag as Tag,
        LuTarget as Target, LuUpload as Upload, LuUsers as Users, LuX as Close, LuZap as Zap,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowsFullscreen as Expand, BsBoxSeam as Package, BsBullseye as Target,
        BsCheckCircle as Success, BsChevronDown as ChevronDown, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsDownload as Download, BsEnvelope as Mail,
        BsExclamationCircle as Failure, BsEye as Eye, BsFileEarmarkText as FileText,
        BsGrid as Grid, BsHeart as Heart, BsImage as Image, BsLightning as Zap,
        BsListUl as List, BsPeople as Users, BsPlay as Play, BsPlusLg as Plus,
        BsRocketTakeoff as Rocket, BsSearch as Search, BsShare as Share, BsShield as Shield,
        BsTag as Tag, BsUpload as Upload, BsXLg as Close,
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

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOSE, Close);
themed_icon!(DOWNLOAD, Download);
themed_icon!(EXPAND, Expand);
themed_icon!(EYE, Eye);
themed_icon!(FAILURE, Failure);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(GRID, Grid);
themed_icon!(HEART, Heart);
themed_icon!(IMAGE, Image);
themed_icon!(LIST, List);
themed_icon!(MAIL, Mail);
themed_icon!(PACKAGE, Package);
themed_icon!(PLAY, Play);
themed_icon!(PLUS, Plus);
themed_icon!(ROCKET, Rocket);
themed_icon!(SEARCH, Search);
themed_icon!(SHARE, Share);
themed_icon!(SHIELD, Shield);
themed_icon!(SUCCESS, Success);
themed_icon!(TAG, Tag);
themed_icon!(TARGET, Target);
themed_icon!(UPLOAD, Upload);
themed_icon!(USERS, Users);
themed_icon!(ZAP, Zap);
