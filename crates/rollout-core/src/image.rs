use std::fmt;

use crate::tag::ReleaseTag;

/// Fully-qualified image reference: `<registry>/<project>/<image>:<tag>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    registry: String,
    project: String,
    image: String,
    tag: ReleaseTag,
}

impl ImageReference {
    pub fn new(registry: &str, project: &str, image: &str, tag: ReleaseTag) -> Self {
        Self {
            registry: registry.to_owned(),
            project: project.to_owned(),
            image: image.to_owned(),
            tag,
        }
    }

    /// Repository part without the tag.
    pub fn repository(&self) -> String {
        format!("{}/{}/{}", self.registry, self.project, self.image)
    }

    pub fn registry(&self) -> &str {
        &self.registry
    }

    pub fn tag(&self) -> &ReleaseTag {
        &self.tag
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}:{}",
            self.registry, self.project, self.image, self.tag
        )
    }
}
