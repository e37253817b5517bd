use std::fmt;

#[derive(Debug, Default)]
pub struct DoctorReport {
    pub docker: CheckResult,
    pub kubectl: CheckResult,
    pub context: CheckResult,
    pub deployment: CheckResult,
    pub config_file: CheckResult,
}

impl DoctorReport {
    /// Every check, labelled, in display order.
    pub fn checks(&self) -> [(&'static str, &CheckResult); 5] {
        [
            ("docker", &self.docker),
            ("kubectl", &self.kubectl),
            ("context", &self.context),
            ("deployment", &self.deployment),
            ("config file", &self.config_file),
        ]
    }

    pub fn all_passed(&self) -> bool {
        self.checks().iter().all(|(_, check)| check.passed)
    }
}

impl fmt::Display for DoctorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rollout doctor")?;
        writeln!(f, "--------------")?;
        for (label, check) in self.checks() {
            let mut lines = check.detail.lines();
            let first = lines.next().unwrap_or("");
            writeln!(f, "{label:<12} {icon}  {first}", icon = check.icon())?;
            for rest in lines {
                writeln!(f, "{:<17}{rest}", "")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct CheckResult {
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    pub fn ok(detail: &str) -> Self {
        Self {
            passed: true,
            detail: detail.to_owned(),
        }
    }

    pub fn fail(detail: &str) -> Self {
        Self {
            passed: false,
            detail: detail.to_owned(),
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.passed { "OK" } else { "NG" }
    }
}
