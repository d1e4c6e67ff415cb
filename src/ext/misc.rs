use crate::{
    caps::registry::Capability, ext::Vend, foundation::core::Token, surface::context::SurfaceLink,
};

/// `EXT_blend_minmax`.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct ExtBlendMinmax {
    /// `MIN_EXT`.
    pub min_ext: Token,
    /// `MAX_EXT`.
    pub max_ext: Token,
}

impl Vend for ExtBlendMinmax {
    fn vend(_: &SurfaceLink) -> Self {
        Self {
            min_ext: Capability::MIN_EXT.token(),
            max_ext: Capability::MAX_EXT.token(),
        }
    }
}

/// `EXT_disjoint_timer_query`.
#[derive(Clone, Debug)]
#[non_exhaustive]
#[allow(missing_docs)]
pub struct ExtDisjointTimerQuery {
    pub query_counter_bits_ext: Token,
    pub current_query_ext: Token,
    pub query_result_ext: Token,
    pub query_result_available_ext: Token,
    pub time_elapsed_ext: Token,
    pub timestamp_ext: Token,
    pub gpu_disjoint_ext: Token,
}

impl Vend for ExtDisjointTimerQuery {
    fn vend(_: &SurfaceLink) -> Self {
        Self {
            query_counter_bits_ext: Capability::QUERY_COUNTER_BITS_EXT.token(),
            current_query_ext: Capability::CURRENT_QUERY_EXT.token(),
            query_result_ext: Capability::QUERY_RESULT_EXT.token(),
            query_result_available_ext: Capability::QUERY_RESULT_AVAILABLE_EXT.token(),
            time_elapsed_ext: Capability::TIME_ELAPSED_EXT.token(),
            timestamp_ext: Capability::TIMESTAMP_EXT.token(),
            gpu_disjoint_ext: Capability::GPU_DISJOINT_EXT.token(),
        }
    }
}

/// `OES_standard_derivatives`.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct OesStandardDerivatives {
    /// `FRAGMENT_SHADER_DERIVATIVE_HINT_OES`.
    pub fragment_shader_derivative_hint_oes: Token,
}

impl Vend for OesStandardDerivatives {
    fn vend(_: &SurfaceLink) -> Self {
        Self {
            fragment_shader_derivative_hint_oes: Capability::FRAGMENT_SHADER_DERIVATIVE_HINT_OES
                .token(),
        }
    }
}

/// `OES_vertex_array_object`.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct OesVertexArrayObject {
    /// `VERTEX_ARRAY_BINDING_OES`.
    pub vertex_array_binding_oes: Token,
}

impl Vend for OesVertexArrayObject {
    fn vend(_: &SurfaceLink) -> Self {
        Self {
            vertex_array_binding_oes: Capability::VERTEX_ARRAY_BINDING_OES.token(),
        }
    }
}
