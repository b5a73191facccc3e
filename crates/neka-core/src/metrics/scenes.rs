//! Scene count and pacing

use serde::{Deserialize, Serialize};

use super::Metric;
use crate::ScriptText;
use crate::patterns;

pub const IDEAL_SCENE_COUNT_MIN: usize = 40;
pub const IDEAL_SCENE_COUNT_MAX: usize = 60;
/// Points lost per scene outside the ideal band
pub const SCENE_PENALTY: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenePacing {
    /// Average under one page
    Choppy,
    Good,
    /// Average over four pages
    Slow,
}

impl ScenePacing {
    pub fn from_average(avg_scene_length: f64) -> Self {
        if avg_scene_length < 1.0 {
            Self::Choppy
        } else if avg_scene_length > 4.0 {
            Self::Slow
        } else {
            Self::Good
        }
    }

    pub fn message(&self, avg_scene_length: f64) -> String {
        match self {
            Self::Choppy => format!(
                "Scenes are very short (avg {:.1} pages) - may feel choppy",
                avg_scene_length
            ),
            Self::Slow => format!(
                "Scenes are quite long (avg {:.1} pages) - may slow pacing",
                avg_scene_length
            ),
            Self::Good => format!("Scene length is good (avg {:.1} pages)", avg_scene_length),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneResult {
    pub score: f64,
    pub count: usize,
    /// Pages per scene
    pub avg_length: f64,
    pub pacing: ScenePacing,
    pub feedback: Vec<String>,
}

impl Metric for SceneResult {
    fn name(&self) -> &'static str {
        "Scene Structure"
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn feedback(&self) -> &[String] {
        &self.feedback
    }
}

/// 100 inside the ideal band, minus [`SCENE_PENALTY`] per scene outside it
pub fn scene_count_score(scene_count: usize) -> f64 {
    let distance = if scene_count < IDEAL_SCENE_COUNT_MIN {
        IDEAL_SCENE_COUNT_MIN - scene_count
    } else if scene_count > IDEAL_SCENE_COUNT_MAX {
        scene_count - IDEAL_SCENE_COUNT_MAX
    } else {
        0
    };
    (100.0 - distance as f64 * SCENE_PENALTY).max(0.0)
}

pub fn analyze_scene_structure(script: &ScriptText) -> SceneResult {
    let count = patterns::count_scene_lines(script.as_str());
    let page_count = script.page_count();
    let avg_length = if count > 0 {
        page_count / count as f64
    } else {
        0.0
    };

    let pacing = ScenePacing::from_average(avg_length);

    SceneResult {
        score: scene_count_score(count),
        count,
        avg_length,
        pacing,
        feedback: vec![pacing.message(avg_length)],
    }
}
