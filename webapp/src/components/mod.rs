//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

pub mod notice;

pub use notice::NoticeModal;
