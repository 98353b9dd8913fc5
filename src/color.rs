//! The scalar and triple types every model and conversion is built on.

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// The largest of the three components.
    pub fn max(&self) -> Component {
        crate::math::max3(self.0, self.1, self.2)
    }

    /// The smallest of the three components.
    pub fn min(&self) -> Component {
        crate::math::min3(self.0, self.1, self.2)
    }
}
