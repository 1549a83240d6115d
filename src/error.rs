use thiserror::Error;

/// Errors raised while building primitives, lights, or the camera from
/// property maps. All of them abort scene assembly.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A required property is absent from an entry's map.
    #[error("missing property `{0}`")]
    MissingProperty(String),

    /// A property value failed numeric or vector conversion.
    #[error("property `{key}` has malformed value `{value}`")]
    MalformedProperty { key: String, value: String },

    /// A property that must carry a direction has no length.
    #[error("property `{key}` is a zero-length vector")]
    DegenerateVector { key: String },

    /// The camera's pixel sub-rectangle does not fit inside the image.
    #[error(
        "render region rows {begrow}..={endrow}, cols {begcol}..={endcol} \
         does not fit a {width}x{height} image"
    )]
    RegionOutOfBounds {
        begrow: u32,
        endrow: u32,
        begcol: u32,
        endcol: u32,
        width: u32,
        height: u32,
    },
}
