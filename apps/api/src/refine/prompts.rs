// All prompt constants for the refine module. Templates are immutable; every
// one carries exactly three substitution points: {text}, {format},
// {hide_contact}. Slot binding happens in `templates::render_prompt`.

/// Directive sentence inserted verbatim when contact details must be
/// suppressed; the slot renders as an empty string otherwise.
pub const HIDE_CONTACT_DIRECTIVE: &str =
    "Do not include any contact information such as name, email, phone, or LinkedIn in the output.";

/// Polite/keigo Japanese rewrite for a formal 職務経歴書.
pub const JAPANESE_KEIGO_TEMPLATE: &str = r#"あなたは日本のプロのキャリアコンサルタントです。以下の英文の履歴書の内容を丁寧で適切な日本語（敬語）に翻訳してください。
{hide_contact}
特に職歴部分では、「〜を担当しました」「〜を行いました」「〜に従事しました」などの表現を用い、
適切な職務経歴書の形式に従ってください。
出力は日本の職務経歴書にふさわしい丁寧語や敬語を使ってください。
出力形式は{format}でお願いします。

### 英文内容:
{text}

### 出力（日本語の敬語・ビジネス文）:"#;

/// Casual-register Japanese rewrite.
pub const JAPANESE_CASUAL_TEMPLATE: &str = r#"あなたは日本のキャリアアドバイザーです。以下の英文の履歴書の内容を自然な日本語（カジュアル）に翻訳してください。
{hide_contact}
職歴やスキルはわかりやすく簡潔にまとめてください。
出力形式は{format}でお願いします。

### 英文内容:
{text}

### 出力（日本語のカジュアル文）:"#;

/// Professional-tone English rewrite preserving meaning.
pub const ENGLISH_PROFESSIONAL_TEMPLATE: &str = r#"You are a resume-writing assistant for job applicants.
Refine the resume content below to use a professional tone in English, improving clarity, structure, and grammar without changing the meaning.
{hide_contact}
Output format: {format}

### Original:
{text}

### Improved Resume (Professional English):"#;

/// Concise bullet-point English rewrite.
pub const ENGLISH_CONCISE_TEMPLATE: &str = r#"You are a resume assistant. Rewrite the following resume in concise, bullet-point English, focusing on achievements and skills.
{hide_contact}
Output format: {format}

### Original:
{text}

### Concise Resume:"#;

/// LinkedIn summary/experience rewrite.
pub const ENGLISH_LINKEDIN_TEMPLATE: &str = r#"You are a LinkedIn profile expert. Rewrite the following resume as a LinkedIn summary and experience section, using a friendly and professional English tone.
{hide_contact}
Output format: {format}

### Original:
{text}

### LinkedIn Profile:"#;
