//! Snapshot tests for the metrics engine

#[cfg(test)]
mod snapshot_tests {
    use crate::{ScriptText, compute_metrics};
    use insta::assert_yaml_snapshot;
    use serde::Serialize;

    const SAMPLE: &str = "\
FADE IN:

INT. DINER - NIGHT

Rain streaks the windows. MAYA sits alone in a booth.

                    MAYA
          You're late.

                    THEO
          Traffic.

int. kitchen - continuous

The cook walked past. He saw nothing.
";

    #[derive(Serialize)]
    struct Counts {
        lines: usize,
        words: usize,
        proper_headings: usize,
        improper_headings: usize,
        character_cues: usize,
        past_tense_verbs: usize,
        dialogue_words: usize,
        scenes: usize,
        blank_lines: usize,
    }

    #[test]
    fn test_sample_counts_snapshot() {
        let script = ScriptText::new(SAMPLE);
        let bundle = compute_metrics(&script);

        let counts = Counts {
            lines: script.line_count(),
            words: script.word_count(),
            proper_headings: bundle.format.proper_headings,
            improper_headings: bundle.format.improper_headings,
            character_cues: bundle.format.character_cues,
            past_tense_verbs: bundle.format.past_tense_verbs,
            dialogue_words: bundle.dialogue.dialogue_words,
            scenes: bundle.scenes.count,
            blank_lines: bundle.whitespace.blank_lines,
        };

        assert_yaml_snapshot!(counts, @r###"
        ---
        lines: 16
        words: 32
        proper_headings: 1
        improper_headings: 2
        character_cues: 2
        past_tense_verbs: 2
        dialogue_words: 3
        scenes: 1
        blank_lines: 7
        "###);
    }

    #[test]
    fn test_sample_issue_snapshot() {
        let bundle = compute_metrics(&ScriptText::new(SAMPLE));

        assert_yaml_snapshot!(bundle.format.issues, @r###"
        ---
        - Found 2 improperly formatted scene headings (should be INT. or EXT. in caps)
        "###);
        assert_yaml_snapshot!(bundle.dialogue.balance, @r###"
        ---
        action_heavy
        "###);
        assert_yaml_snapshot!(bundle.whitespace.band, @r###"
        ---
        balanced
        "###);
    }
}
