//! Surface materials carried as polygon metadata.

/// Shading model of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shading {
    Lambert,
    Blinn,
}

/// A named surface material.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub shading: Shading,
    /// Linear RGB diffuse color
    pub diffuse: [f32; 3],
}

impl Material {
    pub fn new(name: impl Into<String>, shading: Shading, diffuse: [f32; 3]) -> Self {
        Material {
            name: name.into(),
            shading,
            diffuse,
        }
    }

    /// Mid-grey blinn, assigned wherever geometry has lost its material.
    pub fn placeholder() -> Self {
        Material::new("blinn1", Shading::Blinn, [0.5, 0.5, 0.5])
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::placeholder()
    }
}
