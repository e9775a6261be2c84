use std::fs;

use tempfile::TempDir;

use crate::models::config::Config;
use crate::paths::Layout;
use crate::repository::ProblemRepository;

pub const TEMPLATE: &str = "function solution(nums, target) {\n}\n\nexport default solution;\n";
pub const TEST: &str = "export default function test(describe, it, expect, code) {\n  describe('t', () => {\n    it('works', () => expect(code([2, 7], 9)).toEqual([0, 1]));\n  });\n}\n";

/// A throwaway workspace rooted in a temporary directory.
pub struct TestRepo {
    _dir: TempDir,
    layout: Layout,
}

impl TestRepo {
    pub fn new() -> Self {
        let repo = Self::empty();
        fs::create_dir_all(&repo.layout.problems).unwrap();
        repo
    }

    /// No problems directory at all.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let layout = Config::default().layout(dir.path());
        Self { _dir: dir, layout }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn repository(&self) -> ProblemRepository {
        ProblemRepository::new(self.layout.clone())
    }

    pub fn add_problem(&self, name: &str, readme: &str) {
        let dir = self.layout.problems.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("README.md"), readme).unwrap();
        fs::write(dir.join("template.js"), TEMPLATE).unwrap();
        fs::write(dir.join("test.js"), TEST).unwrap();
    }

    pub fn add_playground(&self, name: &str, content: &str) {
        fs::create_dir_all(&self.layout.playground).unwrap();
        fs::write(self.layout.playground.join(format!("{}.js", name)), content).unwrap();
    }

    pub fn remove(&self, name: &str, file: &str) {
        fs::remove_file(self.layout.problems.join(name).join(file)).unwrap();
    }
}
