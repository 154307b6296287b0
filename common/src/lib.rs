//! About Us Common Library
//!
//! CLIとWeb(WASM)で共有される型・ビューモデル・アニメーション定義

pub mod types;
pub mod error;
pub mod directory;
pub mod selection;
pub mod lifecycle;
pub mod hero;
pub mod animation;

pub use types::{Department, DepartmentFilter, DevelopmentTeam, Section, TeamMember, TeamRoster};
pub use error::{Error, Result};
pub use directory::{LoadPhase, RosterSource, TeamDirectoryStore, DEFAULT_ROSTER_PATH};
pub use selection::{SelectionController, SelectionState};
pub use lifecycle::MountGuard;
pub use hero::{CounterCycle, PhraseRotator, StatCounter, HERO_STATS};
pub use animation::{AnimatedProperty, AnimationSpec, Easing, Repeat, ScrollReveal, ScrollTrigger};
