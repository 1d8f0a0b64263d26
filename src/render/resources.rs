use super::program;
use crate::error::FxError;
use folio_core::{CoverFit, RippleUniforms, SurfaceSize, QUAD_VERTICES};
use web_sys::{
    HtmlImageElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext as GL, WebGlTexture,
    WebGlUniformLocation,
};

/// Uniform locations resolved once after linking. A `None` means the driver
/// optimized the uniform away; setting it is then a no-op.
pub(crate) struct UniformLocations {
    pub(crate) image: Option<WebGlUniformLocation>,
    pub(crate) resolution: Option<WebGlUniformLocation>,
    pub(crate) mouse: Option<WebGlUniformLocation>,
    pub(crate) exit_start: Option<WebGlUniformLocation>,
    pub(crate) time: Option<WebGlUniformLocation>,
    pub(crate) intensity: Option<WebGlUniformLocation>,
    pub(crate) exit_progress: Option<WebGlUniformLocation>,
}

impl UniformLocations {
    fn resolve(gl: &GL, program: &WebGlProgram) -> Self {
        let loc = |name: &str| gl.get_uniform_location(program, name);
        Self {
            image: loc("uImage"),
            resolution: loc("uResolution"),
            mouse: loc("uMouse"),
            exit_start: loc("uExitStart"),
            time: loc("uTime"),
            intensity: loc("uIntensity"),
            exit_progress: loc("uExitProgress"),
        }
    }
}

/// Every GL object one ripple surface needs, created once per context.
///
/// - `quad` holds the fixed clip-space corners (static).
/// - `tex_coords` holds the cover-fit window and is rewritten on layout.
/// - `texture` receives the source image exactly once.
pub(crate) struct GlResources {
    pub(crate) program: WebGlProgram,
    pub(crate) quad: WebGlBuffer,
    pub(crate) tex_coords: WebGlBuffer,
    pub(crate) texture: WebGlTexture,
    pub(crate) uniforms: UniformLocations,
}

impl GlResources {
    pub(crate) fn new(gl: &GL) -> Result<Self, FxError> {
        let program = program::build_ripple_program(gl)?;
        gl.use_program(Some(&program));

        let quad = gl.create_buffer().ok_or(FxError::Create("quad buffer"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&quad));
        gl.buffer_data_with_u8_array(
            GL::ARRAY_BUFFER,
            bytemuck::cast_slice(&QUAD_VERTICES[..]),
            GL::STATIC_DRAW,
        );
        bind_attribute(gl, &program, "aVertex")?;

        let tex_coords = gl
            .create_buffer()
            .ok_or(FxError::Create("texcoord buffer"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&tex_coords));
        gl.buffer_data_with_u8_array(
            GL::ARRAY_BUFFER,
            bytemuck::cast_slice(&CoverFit::FULL.tex_coords()[..]),
            GL::DYNAMIC_DRAW,
        );
        bind_attribute(gl, &program, "aUV")?;

        let texture = gl.create_texture().ok_or(FxError::Create("texture"))?;
        gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::LINEAR as i32);

        let uniforms = UniformLocations::resolve(gl, &program);
        gl.uniform1i(uniforms.image.as_ref(), 0);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);

        Ok(Self {
            program,
            quad,
            tex_coords,
            texture,
            uniforms,
        })
    }

    pub(crate) fn upload_image(&self, gl: &GL, image: &HtmlImageElement) -> Result<(), FxError> {
        gl.bind_texture(GL::TEXTURE_2D, Some(&self.texture));
        gl.tex_image_2d_with_u32_and_u32_and_image(
            GL::TEXTURE_2D,
            0,
            GL::RGBA as i32,
            GL::RGBA,
            GL::UNSIGNED_BYTE,
            image,
        )
        .map_err(|e| FxError::TextureUpload(format!("{:?}", e)))
    }

    pub(crate) fn upload_fit(&self, gl: &GL, fit: &CoverFit) {
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.tex_coords));
        gl.buffer_data_with_u8_array(
            GL::ARRAY_BUFFER,
            bytemuck::cast_slice(&fit.tex_coords()[..]),
            GL::DYNAMIC_DRAW,
        );
    }

    pub(crate) fn draw(&self, gl: &GL, size: SurfaceSize, u: &RippleUniforms) {
        let loc = &self.uniforms;
        gl.uniform2f(loc.resolution.as_ref(), size.width as f32, size.height as f32);
        gl.uniform2f(loc.mouse.as_ref(), u.mouse.x, u.mouse.y);
        gl.uniform2f(loc.exit_start.as_ref(), u.exit_start.x, u.exit_start.y);
        gl.uniform1f(loc.time.as_ref(), u.time);
        gl.uniform1f(loc.intensity.as_ref(), u.intensity);
        gl.uniform1f(loc.exit_progress.as_ref(), u.exit_progress);

        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.draw_arrays(GL::TRIANGLE_FAN, 0, QUAD_VERTICES.len() as i32);
    }

    pub(crate) fn release(&self, gl: &GL) {
        gl.delete_buffer(Some(&self.quad));
        gl.delete_buffer(Some(&self.tex_coords));
        gl.delete_texture(Some(&self.texture));
        gl.delete_program(Some(&self.program));
    }
}

/// Point a 2-float attribute at the buffer currently bound to ARRAY_BUFFER.
fn bind_attribute(gl: &GL, program: &WebGlProgram, name: &'static str) -> Result<(), FxError> {
    let location = gl.get_attrib_location(program, name);
    if location < 0 {
        return Err(FxError::Create(name));
    }
    let location = location as u32;
    gl.vertex_attrib_pointer_with_i32(location, 2, GL::FLOAT, false, 0, 0);
    gl.enable_vertex_attrib_array(location);
    Ok(())
}
