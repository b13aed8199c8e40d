//! nimbus-core: Record building, resource resolution and output rendering
//!
//! Every listing command funnels its entities through a [`RecordSet`], which
//! [`render`] then presents as a table, JSON, key-value pairs or a custom
//! template, depending on the [`OutputOptions`] chosen on the command line.
//! Volume listings are denormalized first by [`resolve_volumes`].

pub mod dispatch;
pub mod error;
pub mod quota;
pub mod record;
pub mod render;
pub mod resolve;

pub use dispatch::{
    JsonShape, Layout, OutputFormat, OutputOptions, Renderer, View, render, select,
};
pub use error::{OutputError, RecordError};
pub use quota::QuotaUsage;
pub use record::{Column, Field, Record, RecordSet, yes_no};
pub use resolve::{
    DANGLING, Notice, ResolutionContext, ResolvedVolume, ResolvedVolumes, VOLUME_COLUMNS,
    resolve_volumes,
};
