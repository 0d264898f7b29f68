use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList};

use super::common::{fill_primitive, premul_alpha_blend, GrowableBuffer, ViewportBinding};

/// Renderer for `DrawCmd::Polygon`.
///
/// Convex polygons are fan-triangulated on the CPU into one vertex buffer and
/// drawn with a single solid-color pipeline. No anti-aliasing.
#[derive(Default)]
pub struct PolygonRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    viewport: Option<ViewportBinding>,
    vertices: GrowableBuffer,
}

impl PolygonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &DrawList) {
        let vertices = build_vertices(draw_list);
        if vertices.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        let (Some(pipeline), Some(viewport)) = (self.pipeline.as_ref(), self.viewport.as_ref()) else {
            return;
        };
        viewport.write(ctx);

        let Some(vbo) = self
            .vertices
            .upload(ctx, "puppet polygon vbo", bytemuck::cast_slice(&vertices))
        else {
            return;
        };

        let mut rpass = target.begin_load_pass("puppet polygon pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &viewport.bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..vertices.len() as u32, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("puppet polygon shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/polygon.wgsl").into()),
        });

        let viewport = ViewportBinding::new(ctx, "puppet polygon viewport");

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("puppet polygon pipeline layout"),
            bind_group_layouts: &[&viewport.layout],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("puppet polygon pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[PolygonVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: fill_primitive(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("polygon pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.viewport = Some(viewport);
    }
}

/// Splits a convex polygon into triangles sharing its first vertex.
///
/// Zero-area slivers (collinear corners) are skipped.
pub(crate) fn fan_triangulate(points: &[Vec2]) -> impl Iterator<Item = [Vec2; 3]> + '_ {
    let anchor = points.first().copied().unwrap_or_default();
    points
        .windows(2)
        .skip(1)
        .map(move |w| [anchor, w[0], w[1]])
        .filter(|[a, b, c]| (*b - *a).cross(*c - *a) != 0.0)
}

fn build_vertices(draw_list: &DrawList) -> Vec<PolygonVertex> {
    let mut out = Vec::new();
    for cmd in draw_list.items() {
        let DrawCmd::Polygon(poly) = cmd else { continue };
        let color = poly.color.to_array();
        for tri in fan_triangulate(&poly.points) {
            out.extend(tri.iter().map(|p| PolygonVertex { pos: [p.x, p.y], color }));
        }
    }
    out
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Vertex layout (24 bytes): `pos` at loc 0, premultiplied `color` at loc 1.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct PolygonVertex {
    pos: [f32; 2],
    color: [f32; 4],
}

impl PolygonVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PolygonVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn triangle_is_a_single_fan() {
        let pts = [v(50.0, 0.0), v(0.0, 100.0), v(100.0, 100.0)];
        let tris: Vec<_> = fan_triangulate(&pts).collect();
        assert_eq!(tris, vec![pts]);
    }

    #[test]
    fn quad_becomes_two_triangles() {
        let pts = [v(0.0, 0.0), v(10.0, 0.0), v(10.0, 10.0), v(0.0, 10.0)];
        let tris: Vec<_> = fan_triangulate(&pts).collect();
        assert_eq!(
            tris,
            vec![[pts[0], pts[1], pts[2]], [pts[0], pts[2], pts[3]]]
        );
    }

    #[test]
    fn collinear_points_produce_nothing() {
        let pts = [v(0.0, 0.0), v(5.0, 5.0), v(10.0, 10.0)];
        assert_eq!(fan_triangulate(&pts).count(), 0);
    }

    #[test]
    fn vertices_carry_color_and_skip_circles() {
        let mut list = DrawList::new();
        list.push_polygon(&[v(50.0, 0.0), v(0.0, 100.0), v(100.0, 100.0)], Color::BLACK);
        list.push_circle(v(10.0, 10.0), 5.0, Color::BLACK);

        let verts = build_vertices(&list);

        assert_eq!(verts.len(), 3);
        assert!(verts.iter().all(|vx| vx.color == [0.0, 0.0, 0.0, 1.0]));
        assert_eq!(verts[0].pos, [50.0, 0.0]);
    }
}
