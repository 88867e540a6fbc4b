use crate::domain::guide::entities::ChatContext;

#[derive(Debug, Clone)]
pub struct ImageInput {
    pub data: Vec<u8>,
    /// MIME type as declared by the upload, forwarded to the model.
    pub mime_type: String,
}

#[derive(Debug, Clone)]
pub struct AnalyzeGuideInput {
    pub image: Option<ImageInput>,
    pub location: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ChatInput {
    pub context: ChatContext,
    pub question: String,
}
