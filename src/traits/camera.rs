use crate::pose::CameraTransform;

/// Camera node owned by the host scene
pub trait CameraNode {
    /// Replace the node's local transform
    ///
    /// Called once per frame with the fully integrated pose.
    fn set_transform(&mut self, transform: CameraTransform);
}
