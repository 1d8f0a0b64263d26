use crate::error::FxError;
use folio_core::{ripple_fragment_source, RIPPLE_VERT};
use web_sys::{WebGlProgram, WebGlRenderingContext as GL, WebGlShader};

fn stage_name(stage: u32) -> &'static str {
    match stage {
        GL::VERTEX_SHADER => "vertex",
        GL::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    }
}

pub(crate) fn compile_shader(gl: &GL, stage: u32, source: &str) -> Result<WebGlShader, FxError> {
    let shader = gl
        .create_shader(stage)
        .ok_or(FxError::Create("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(FxError::ShaderCompile {
            stage: stage_name(stage),
            log,
        })
    }
}

pub(crate) fn link_program(
    gl: &GL,
    vert: &WebGlShader,
    frag: &WebGlShader,
) -> Result<WebGlProgram, FxError> {
    let program = gl.create_program().ok_or(FxError::Create("program"))?;
    gl.attach_shader(&program, vert);
    gl.attach_shader(&program, frag);
    gl.link_program(&program);
    let ok = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(FxError::ProgramLink(log))
    }
}

/// Compile and link the quad + ripple program. Shader objects are released
/// once linked; the program keeps what it needs.
pub(crate) fn build_ripple_program(gl: &GL) -> Result<WebGlProgram, FxError> {
    let vert = compile_shader(gl, GL::VERTEX_SHADER, RIPPLE_VERT)?;
    let frag = match compile_shader(gl, GL::FRAGMENT_SHADER, &ripple_fragment_source()) {
        Ok(frag) => frag,
        Err(e) => {
            gl.delete_shader(Some(&vert));
            return Err(e);
        }
    };
    let program = link_program(gl, &vert, &frag);
    gl.delete_shader(Some(&vert));
    gl.delete_shader(Some(&frag));
    program
}
