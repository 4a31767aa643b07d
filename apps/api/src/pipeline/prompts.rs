// All LLM prompt constants for the pipeline stages.

/// System prompt for resume parsing — enforces JSON-only output.
pub const RESUME_PARSE_SYSTEM: &str =
    "You are an expert resume analyzer specialized in extracting structured \
    information from resumes. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Resume parsing prompt template. Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"Carefully analyze this resume text and extract all relevant information in a structured format:

{resume_text}

Return ONLY the JSON response with no additional explanation. Follow this exact structure:
{
    "personal_info": {
        "name": "string",
        "contact": "string",
        "location": "string"
    },
    "skills": ["skill1", "skill2"],
    "education": [
        {
            "degree": "string",
            "institution": "string",
            "year": "string"
        }
    ],
    "experience": [
        {
            "position": "string",
            "company": "string",
            "duration": "string",
            "responsibilities": ["string"],
            "achievements": ["string"]
        }
    ],
    "projects": [
        {
            "name": "string",
            "description": "string",
            "technologies": ["string"]
        }
    ],
    "certifications": ["string"],
    "keywords": ["string"]
}

Be comprehensive and accurate. Extract keywords that represent the person's expertise."#;

/// System prompt for keyword derivation — enforces JSON-only output.
pub const KEYWORDS_SYSTEM: &str =
    "You are a career advisor and job matching expert constructing search \
    queries for job-listing services. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keyword derivation prompt template. Replace `{resume_data}` before sending.
pub const KEYWORDS_PROMPT_TEMPLATE: &str = r#"Based on the following parsed resume information, derive between 5 and 7 job-search keyword sets that would surface the best-matching open positions for this candidate. Order them from strongest match to weakest.

Resume data:
{resume_data}

Return ONLY the JSON response with no additional explanation. Follow this exact structure:
{
    "keyword_sets": [
        {
            "primary_keyword": "string - the job title or main search term",
            "related_terms": ["string", "string"],
            "job_level": "entry" | "mid" | "senior",
            "locations": ["string"]
        }
    ]
}

Rules:
- Produce at least 5 and at most 7 keyword sets.
- primary_keyword should be a realistic job title, not a skill name.
- related_terms are the skills and technologies most relevant to that title.
- job_level must reflect the candidate's experience depth.
- locations come from the resume when stated, otherwise use ["Remote"]."#;
