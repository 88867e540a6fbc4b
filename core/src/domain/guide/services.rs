use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    guide::{
        entities::{ChatAnswer, ChatContext, GuideResult},
        helpers::strip_code_fences,
        ports::{GenerativeModel, GuideService},
        schema::get_guide_schema,
        value_objects::{AnalyzeGuideInput, ChatInput},
    },
};

const JSON_STRUCTURE: &str = r#"Return a strictly valid JSON object (NO markdown, NO backticks) with these keys:
- "landmarkName": String
- "location": String (City, Country)
- "description": String (An engaging 2-sentence intro)
- "history": String (A 3-sentence historical fun fact)
- "itinerary": Array of Strings (Exactly 3 items. Day 1, Day 2, Day 3 plans centered around this location)
- "food": Array of Strings (Top 3 local dishes to try nearby)"#;

fn image_prompt() -> String {
    format!("Identify this landmark. Act as a travel guide. {JSON_STRUCTURE}")
}

fn location_prompt(location: &str) -> String {
    format!("I want to visit \"{location}\". Act as a travel guide. {JSON_STRUCTURE}")
}

fn chat_prompt(context: &ChatContext, question: &str) -> String {
    format!(
        "Context: The user is asking about \"{}\" located in \"{}\".\n\
         Historical info provided previously: \"{}\".\n\n\
         User Question: \"{}\"\n\n\
         Answer the user's question helpfully and briefly (max 2 sentences).",
        context.name, context.location, context.history, question
    )
}

impl<M> GuideService for Service<M>
where
    M: GenerativeModel,
{
    async fn analyze(&self, input: AnalyzeGuideInput) -> Result<GuideResult, CoreError> {
        let location = input
            .location
            .as_deref()
            .map(str::trim)
            .filter(|location| !location.is_empty());

        // Image takes precedence when both inputs are present.
        let raw = match (input.image, location) {
            (Some(image), _) => {
                self.generative_model
                    .generate_with_image(image_prompt(), image, Some(get_guide_schema()))
                    .await?
            }
            (None, Some(location)) => {
                self.generative_model
                    .generate_with_text(location_prompt(location), Some(get_guide_schema()))
                    .await?
            }
            (None, None) => {
                return Err(CoreError::Validation(
                    "Please upload an image or enter a location name.".to_string(),
                ));
            }
        };

        let cleaned = strip_code_fences(&raw);
        let result: GuideResult = serde_json::from_str(&cleaned).map_err(|e| {
            tracing::error!("Failed to parse model response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse model response: {}", e))
        })?;

        Ok(result)
    }

    async fn chat(&self, input: ChatInput) -> Result<ChatAnswer, CoreError> {
        let prompt = chat_prompt(&input.context, &input.question);

        // Unlike analyze, chat failures never expose the upstream message.
        let text = self
            .generative_model
            .generate_with_text(prompt, None)
            .await
            .map_err(|error| {
                tracing::error!("Chat model call failed: {}", error);
                CoreError::ExternalServiceError("Chat Error".to_string())
            })?;

        Ok(ChatAnswer {
            answer: text.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::guide::ports::MockGenerativeModel;
    use crate::domain::guide::value_objects::ImageInput;

    const GUIDE_JSON: &str = r#"{
        "landmarkName": "Eiffel Tower",
        "location": "Paris, France",
        "description": "An iron icon over the Champ de Mars.",
        "history": "Built for the 1889 World's Fair.",
        "itinerary": ["Trocadero views", "Summit tickets", "Seine cruise"],
        "food": ["Croissants", "Crepes", "Macarons"]
    }"#;

    fn sample_image() -> ImageInput {
        ImageInput {
            data: vec![0xFF, 0xD8, 0xFF, 0xE0],
            mime_type: "image/jpeg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_analyze_with_location_parses_guide() {
        let mut model = MockGenerativeModel::new();
        model
            .expect_generate_with_text()
            .withf(|prompt, schema| prompt.contains("\"Kyoto, Japan\"") && schema.is_some())
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(GUIDE_JSON.to_string()) }));

        let service = Service::new(model);
        let result = service
            .analyze(AnalyzeGuideInput {
                image: None,
                location: Some("Kyoto, Japan".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.landmark_name, "Eiffel Tower");
        assert_eq!(result.itinerary.len(), 3);
        assert_eq!(result.food.len(), 3);
    }

    #[tokio::test]
    async fn test_analyze_prefers_image_over_location() {
        let mut model = MockGenerativeModel::new();
        model
            .expect_generate_with_image()
            .withf(|prompt, _, schema| prompt.contains("Identify this landmark") && schema.is_some())
            .times(1)
            .returning(|_, _, _| Box::pin(async { Ok(GUIDE_JSON.to_string()) }));

        let service = Service::new(model);
        service
            .analyze(AnalyzeGuideInput {
                image: Some(sample_image()),
                location: Some("Kyoto, Japan".to_string()),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_analyze_rejects_missing_inputs() {
        let service = Service::new(MockGenerativeModel::new());
        let error = service
            .analyze(AnalyzeGuideInput {
                image: None,
                location: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(error, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_location() {
        let service = Service::new(MockGenerativeModel::new());
        let error = service
            .analyze(AnalyzeGuideInput {
                image: None,
                location: Some("   ".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(error, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn test_analyze_strips_markdown_fences() {
        let mut model = MockGenerativeModel::new();
        model
            .expect_generate_with_text()
            .returning(|_, _| Box::pin(async { Ok(format!("```json\n{GUIDE_JSON}\n```")) }));

        let service = Service::new(model);
        let result = service
            .analyze(AnalyzeGuideInput {
                image: None,
                location: Some("Paris".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.landmark_name, "Eiffel Tower");
    }

    #[tokio::test]
    async fn test_analyze_invalid_json_is_upstream_error() {
        let mut model = MockGenerativeModel::new();
        model
            .expect_generate_with_text()
            .returning(|_, _| Box::pin(async { Ok("the model rambled instead".to_string()) }));

        let service = Service::new(model);
        let error = service
            .analyze(AnalyzeGuideInput {
                image: None,
                location: Some("Paris".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(error, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn test_analyze_passes_incomplete_object_through() {
        let mut model = MockGenerativeModel::new();
        model
            .expect_generate_with_text()
            .returning(|_, _| {
                Box::pin(async { Ok(r#"{"landmarkName": "Eiffel Tower"}"#.to_string()) })
            });

        let service = Service::new(model);
        let result = service
            .analyze(AnalyzeGuideInput {
                image: None,
                location: Some("Paris".to_string()),
            })
            .await
            .unwrap();

        // Missing keys are not guessed at; they surface as empty values.
        assert_eq!(result.landmark_name, "Eiffel Tower");
        assert!(result.itinerary.is_empty());
        assert!(result.food.is_empty());
    }

    #[tokio::test]
    async fn test_chat_embeds_context_verbatim() {
        let mut model = MockGenerativeModel::new();
        model
            .expect_generate_with_text()
            .withf(|prompt, schema| {
                prompt.contains("\"Eiffel Tower\"")
                    && prompt.contains("\"Paris, France\"")
                    && prompt.contains("\"Built for the 1889 World's Fair.\"")
                    && prompt.contains("\"What time does it close?\"")
                    && schema.is_none()
            })
            .times(1)
            .returning(|_, _| {
                Box::pin(async { Ok("  It usually closes around midnight.  ".to_string()) })
            });

        let service = Service::new(model);
        let answer = service
            .chat(ChatInput {
                context: ChatContext {
                    name: "Eiffel Tower".to_string(),
                    location: "Paris, France".to_string(),
                    history: "Built for the 1889 World's Fair.".to_string(),
                },
                question: "What time does it close?".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(answer.answer, "It usually closes around midnight.");
    }

    #[tokio::test]
    async fn test_chat_failure_maps_to_generic_error() {
        let mut model = MockGenerativeModel::new();
        model.expect_generate_with_text().returning(|_, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("quota exceeded".to_string())) })
        });

        let service = Service::new(model);
        let error = service
            .chat(ChatInput {
                context: ChatContext::default(),
                question: "When?".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(
            error,
            CoreError::ExternalServiceError("Chat Error".to_string())
        );
    }
}
