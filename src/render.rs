//! Seam to the external card renderer.
//!
//! Turning an HTML template into an image happens outside this crate. The
//! lookup only needs something that accepts a template name, the template
//! data and a viewport, and hands back opaque image bytes.

use crate::config::RenderConfig;
use crate::format::TemplateData;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub base_url: String,
}

impl From<&RenderConfig> for Viewport {
    fn from(config: &RenderConfig) -> Self {
        Self {
            width: config.viewport_width,
            height: config.viewport_height,
            base_url: config.base_url.clone(),
        }
    }
}

/// Output of a renderer. The crate never looks inside.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
#[error("{0}")]
pub struct RenderError(pub String);

pub trait TemplateRenderer {
    fn render(
        &self,
        template_name: &str,
        data: &TemplateData,
        viewport: &Viewport,
    ) -> Result<RenderedImage, RenderError>;
}

/// Serializes the render request as JSON for a downstream rendering
/// pipeline to pick up.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonHandoffRenderer;

#[derive(Serialize)]
struct RenderRequest<'a> {
    template: &'a str,
    viewport: &'a Viewport,
    data: &'a TemplateData,
}

impl TemplateRenderer for JsonHandoffRenderer {
    fn render(
        &self,
        template_name: &str,
        data: &TemplateData,
        viewport: &Viewport,
    ) -> Result<RenderedImage, RenderError> {
        let request = RenderRequest {
            template: template_name,
            viewport,
            data,
        };
        let bytes = serde_json::to_vec_pretty(&request).map_err(|e| RenderError(e.to_string()))?;

        Ok(RenderedImage {
            content_type: "application/json".to_string(),
            bytes,
        })
    }
}
