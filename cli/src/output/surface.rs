//! `TerminalSurface` — Presentation-layer implementation of `InstanceSurface`.

use lab_common::InstanceSnapshot;

use crate::application::ports::{InstanceInfo, InstanceSurface};
use crate::output::{HumanRenderer, OutputContext};

/// Prints the info popover and SSH instructions to the terminal.
pub struct TerminalSurface<'a> {
    ctx: &'a OutputContext,
    guide_url: &'a str,
}

impl<'a> TerminalSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext, guide_url: &'a str) -> Self {
        Self { ctx, guide_url }
    }
}

impl InstanceSurface for TerminalSurface<'_> {
    fn show_info(&self, info: &InstanceInfo<'_>) {
        HumanRenderer::new(self.ctx).render_info(info);
    }

    fn show_connection_instructions(&self, snapshot: &InstanceSnapshot) {
        HumanRenderer::new(self.ctx).render_connection_instructions(snapshot, self.guide_url);
    }
}

/// Prints the same surfaces as JSON objects, for `--json`.
pub struct JsonSurface<'a> {
    guide_url: &'a str,
}

impl<'a> JsonSurface<'a> {
    #[must_use]
    pub fn new(guide_url: &'a str) -> Self {
        Self { guide_url }
    }
}

impl InstanceSurface for JsonSurface<'_> {
    fn show_info(&self, info: &InstanceInfo<'_>) {
        println!(
            "{:#}",
            serde_json::json!({
                "surface": "info",
                "ip": info.ip,
                "created_at": info.created_at,
                "template": info.template_name,
            })
        );
    }

    fn show_connection_instructions(&self, snapshot: &InstanceSnapshot) {
        println!(
            "{:#}",
            serde_json::json!({
                "surface": "ssh_instructions",
                "ip": snapshot.ip,
                "guide_url": self.guide_url,
            })
        );
    }
}
