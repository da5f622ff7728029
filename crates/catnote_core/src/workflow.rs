//! Reference "active inference" notebook workflow.
//!
//! Builds a small agent/environment model and one diagram instance of it,
//! persisting both through a [`NotebookClient`].

use crate::builder::{
    DiagramBuilder, ModelBuilder, NewMorphism, NewMorphismInstance, NewObject, NewObjectInstance,
};
use crate::client::{ClientError, DocumentApi, NotebookClient};
use crate::model::document::Link;
use crate::model::id::DocumentId;

pub const MODEL_NAME: &str = "Active Inference Model";
pub const DIAGRAM_NAME: &str = "Active Inference Instance";
pub const MODEL_THEORY: &str = "simple-schema";

const OBJECT_TYPE: &str = "Entity";
const MORPHISM_TYPE: &str = "Hom";

/// Identifiers of the documents persisted by [`active_inference_workflow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowIds {
    pub model_id: DocumentId,
    pub diagram_id: DocumentId,
}

/// Returns the builder for the reference model, not yet persisted.
pub fn active_inference_model_builder() -> ModelBuilder {
    let mut builder = ModelBuilder::new(MODEL_NAME, MODEL_THEORY);

    let agent = builder.add_object(
        NewObject::new("Agent", OBJECT_TYPE)
            .with_description("An active inference agent that interacts with its environment"),
    );
    let environment = builder.add_object(
        NewObject::new("Environment", OBJECT_TYPE)
            .with_description("The environment that the agent observes and acts upon"),
    );
    let observation = builder.add_object(
        NewObject::new("Observation", OBJECT_TYPE)
            .with_description("Observations made by the agent"),
    );
    builder.add_object(
        NewObject::new("Action", OBJECT_TYPE).with_description("Actions taken by the agent"),
    );

    builder.add_morphism(
        NewMorphism::new("observes", agent, observation, MORPHISM_TYPE)
            .with_description("Agent observes the environment"),
    );
    builder.add_morphism(
        NewMorphism::new("acts_on", agent, environment, MORPHISM_TYPE)
            .with_description("Agent acts on the environment"),
    );
    builder.add_morphism(
        NewMorphism::new("generates", environment, observation, MORPHISM_TYPE)
            .with_description("Environment generates observations"),
    );

    builder.add_text("This model represents the basic structure of an active inference system.");
    builder
}

/// Returns the builder for the reference diagram over `model_ref`.
pub fn active_inference_diagram_builder(model_ref: Link) -> DiagramBuilder {
    let mut builder = DiagramBuilder::new(DIAGRAM_NAME, model_ref);

    let robot = builder.add_object_instance(NewObjectInstance::new("Robot", OBJECT_TYPE));
    let workspace = builder.add_object_instance(NewObjectInstance::new("Workspace", OBJECT_TYPE));
    let camera = builder.add_object_instance(NewObjectInstance::new("Camera Feed", OBJECT_TYPE));

    builder.add_morphism_instance(NewMorphismInstance::new(
        "sees",
        robot,
        camera,
        MORPHISM_TYPE,
    ));
    builder.add_morphism_instance(NewMorphismInstance::new(
        "moves",
        robot,
        workspace,
        MORPHISM_TYPE,
    ));
    builder
}

/// Persists the reference model.
pub async fn active_inference_model<A>(client: &NotebookClient<A>) -> Result<DocumentId, ClientError>
where
    A: DocumentApi + ?Sized,
{
    active_inference_model_builder().create(client).await
}

/// Persists the reference diagram over `model_ref`.
pub async fn active_inference_diagram<A>(
    client: &NotebookClient<A>,
    model_ref: Link,
) -> Result<DocumentId, ClientError>
where
    A: DocumentApi + ?Sized,
{
    active_inference_diagram_builder(model_ref)
        .create(client)
        .await
}

/// Persists the model, then a diagram referencing it.
///
/// The model is read back before the diagram is created; a failed read
/// aborts the workflow with no diagram persisted.
pub async fn active_inference_workflow<A>(
    client: &NotebookClient<A>,
) -> Result<WorkflowIds, ClientError>
where
    A: DocumentApi + ?Sized,
{
    let model_id = active_inference_model(client).await?;
    client.get_model(model_id).await?;
    let model_ref = client.make_ref(model_id);
    let diagram_id = active_inference_diagram(client, model_ref).await?;
    Ok(WorkflowIds {
        model_id,
        diagram_id,
    })
}
