/// Artifact emitted by a pipeline run. `Sum` and `Final` are always
/// written; the rest only when intermediates are requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageArtifact {
    Lumi,
    Gauss,
    Normed,
    Xgrad,
    Ygrad,
    Sum,
    Final,
}

impl StageArtifact {
    /// Suffix used in the artifact file name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Lumi => "lumi",
            Self::Gauss => "gauss",
            Self::Normed => "normed",
            Self::Xgrad => "xgrad",
            Self::Ygrad => "ygrad",
            Self::Sum => "sum",
            Self::Final => "final",
        }
    }
}

impl std::fmt::Display for StageArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
