use std::ops::Range;

use folio_common::{DrawList, Layer, Rect, SurfaceId};
use folio_scene::{matrix, SceneFrame};

use super::helpers::{log_first_frame, scene_labels};
use super::state::RenderState;
use crate::gpu::{scissor_rect, RendererError, ScissorRect};
use crate::quad::QuadInstance;
use crate::text::TextItem;

/// A 3D surface prepared for this frame.
struct SurfacePass {
    id: SurfaceId,
    scissor: ScissorRect,
    meshes: Range<usize>,
}

impl RenderState {
    /// Render a complete frame.
    ///
    /// Draw order: base quads, each 3D surface (stars then meshes, clipped to
    /// its slot), base text with the projected scene labels, overlay quads,
    /// overlay text. Surfaces in `list` without a matching frame in `scenes`
    /// are left empty.
    pub fn render_frame(
        &mut self,
        list: &DrawList,
        scenes: &[SceneFrame],
    ) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::warn!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::debug!("Surface timeout, skipping frame");
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let scale = self.gpu.scale_factor as f32;
        let size = self.gpu.size;
        let (width, height) = size.logical(scale);
        let resolution = [size.width as f32, size.height as f32];
        let screen = Rect::new(0.0, 0.0, width, height);

        let base_quads: Vec<QuadInstance> = list
            .base_quads
            .iter()
            .map(|q| QuadInstance::from_draw(q, scale))
            .collect();
        let overlay_quads: Vec<QuadInstance> = list
            .overlay_quads
            .iter()
            .map(|q| QuadInstance::from_draw(q, scale))
            .collect();
        self.quad.prepare(
            &self.gpu.device,
            &self.gpu.queue,
            &base_quads,
            &overlay_quads,
            resolution[0],
            resolution[1],
        );

        self.mesh.begin_frame();
        let mut surfaces = Vec::with_capacity(list.surfaces.len());
        let mut labels = Vec::new();
        for slot in &list.surfaces {
            let Some(frame) = scenes.iter().find(|f| f.surface == slot.id) else {
                continue;
            };
            let Some(scissor) = scissor_rect(slot.rect, scale, size) else {
                continue;
            };
            let r = slot.rect;
            let remap = matrix::viewport_remap([r.x, r.y, r.width, r.height], width, height);
            let proj = matrix::mul(&remap, &frame.proj);
            let view_proj = matrix::mul(&proj, &frame.view);

            let meshes = self.mesh.queue_scene(&self.gpu.device, frame, &view_proj);
            self.stars.prepare(
                &self.gpu.device,
                &self.gpu.queue,
                frame,
                &proj,
                resolution,
                scale,
            );
            labels.extend(scene_labels(frame, r).into_iter().map(|t| (t, r)));
            surfaces.push(SurfacePass {
                id: slot.id,
                scissor,
                meshes,
            });
        }
        self.mesh.finish(&self.gpu.device, &self.gpu.queue);

        let base_text: Vec<TextItem> = list
            .base_text
            .iter()
            .map(|text| TextItem { text, clip: screen })
            .chain(labels.iter().map(|(text, clip)| TextItem { text, clip: *clip }))
            .collect();
        let overlay_text: Vec<TextItem> = list
            .overlay_text
            .iter()
            .map(|text| TextItem { text, clip: screen })
            .collect();

        self.text.begin_frame(&self.gpu.queue, size.width, size.height);
        for (layer, items) in [(Layer::Base, &base_text), (Layer::Overlay, &overlay_text)] {
            if let Err(e) = self.text.prepare(&self.gpu.device, &self.gpu.queue, layer, items, scale) {
                tracing::warn!("{layer:?} text prepare failed: {e}");
            }
        }

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("folio frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("folio background pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.quad.render_base(&mut pass);
        }

        for surface in &surfaces {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("folio surface pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let s = surface.scissor;
            pass.set_scissor_rect(s.x, s.y, s.width, s.height);
            self.stars.render(&mut pass, surface.id);
            self.mesh.render(&mut pass, surface.meshes.clone());
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("folio overlay pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.text.render(&mut pass, Layer::Base);
            self.quad.render_overlay(&mut pass);
            self.text.render(&mut pass, Layer::Overlay);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}
