//! Analysis prompt construction shared by all providers.

/// System role given to chat-completion providers.
pub const SYSTEM_PROMPT: &str =
    "You are an expert HR analyst specializing in resume evaluation and candidate matching.";

/// Build the analysis prompt embedding the resume and job requirements
/// verbatim, followed by the JSON shape the model must return.
///
/// Deliberately performs no validation: empty inputs pass through unchanged
/// and the pipeline's behavior for them is governed by the provider and the
/// response interpreter.
pub fn build_analysis_prompt(resume_text: &str, job_requirements: &str) -> String {
    format!(
        r#"Analyze the following resume against the job requirements and provide a detailed assessment.

JOB REQUIREMENTS:
{job_requirements}

RESUME:
{resume_text}

Please provide your analysis in the following JSON format:
{{
  "candidateName": "extracted candidate name",
  "email": "extracted email address",
  "phone": "extracted phone number",
  "matchScore": numerical score from 0 to 100,
  "extractedSkills": "comma-separated list of skills found in resume",
  "extractedExperience": "brief summary of experience",
  "analysis": "detailed analysis of strengths, weaknesses, and overall fit"
}}

Consider the following in your analysis:
1. Skills match (technical and soft skills)
2. Experience level and relevance
3. Education background
4. Projects and achievements
5. Overall cultural and role fit

Provide a match score from 0-100 where:
- 90-100: Excellent match
- 75-89: Good match
- 60-74: Fair match
- Below 60: Poor match

Return ONLY the JSON object, no additional text.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_texts() {
        let prompt = build_analysis_prompt("RESUME BODY", "JOB BODY");
        assert!(prompt.contains("RESUME BODY"));
        assert!(prompt.contains("JOB BODY"));
        // Job requirements come before the resume
        assert!(prompt.find("JOB BODY").unwrap() < prompt.find("RESUME BODY").unwrap());
    }

    #[test]
    fn test_prompt_names_all_expected_keys() {
        let prompt = build_analysis_prompt("r", "j");
        for key in [
            "candidateName",
            "email",
            "phone",
            "matchScore",
            "extractedSkills",
            "extractedExperience",
            "analysis",
        ] {
            assert!(prompt.contains(key), "missing key {key}");
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(
            build_analysis_prompt("a", "b"),
            build_analysis_prompt("a", "b")
        );
    }

    #[test]
    fn test_prompt_includes_scoring_bands() {
        let prompt = build_analysis_prompt("r", "j");
        assert!(prompt.contains("90-100"));
        assert!(prompt.contains("75-89"));
        assert!(prompt.contains("60-74"));
        assert!(prompt.contains("Return ONLY the JSON object"));
    }

    #[test]
    fn test_empty_inputs_pass_through() {
        let prompt = build_analysis_prompt("", "");
        assert!(prompt.contains("JOB REQUIREMENTS:"));
        assert!(prompt.contains("RESUME:"));
    }
}
