use crate::agent::role::AgentRole;
use crate::agent::AgentError;
use crate::crew::{Crew, CrewEngine, CrewError, KickoffOutput};
use crate::task::task::{JsonFieldType, Task};
use crate::task::template::{Inputs, TemplateError};
use crate::testing::{test_agent, ScriptedProvider};

fn inputs(topic: &str) -> Inputs {
    Inputs::from([("topic".to_string(), topic.to_string())])
}

fn two_stage_crew(provider: &ScriptedProvider) -> Crew {
    let agents = vec![
        test_agent(AgentRole::new("Researcher", "Research {topic}", "Curious"), provider),
        test_agent(AgentRole::new("Author", "Write about {topic}", "Eloquent"), provider),
    ];
    let tasks = vec![
        Task::new("Collect facts about {topic}", "Bullet points", "Researcher"),
        Task::new("Write a post", "A post", "Author"),
    ];
    Crew::new(agents, tasks, 2).unwrap()
}

#[test]
fn test_new_rejects_empty_task_list() {
    let provider = ScriptedProvider::default();
    let agents = vec![test_agent(AgentRole::new("Solo", "g", "b"), &provider)];
    assert!(matches!(Crew::new(agents, vec![], 0), Err(CrewError::NoTasks)));
}

#[test]
fn test_new_rejects_task_for_unknown_agent() {
    let provider = ScriptedProvider::default();
    let agents = vec![test_agent(AgentRole::new("Solo", "g", "b"), &provider)];
    let tasks = vec![Task::new("d", "e", "Ghost")];

    match Crew::new(agents, tasks, 0) {
        Err(CrewError::UnknownAgent { agent, .. }) => assert_eq!(agent, "Ghost"),
        other => panic!("expected UnknownAgent, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_new_rejects_duplicate_roles() {
    let provider = ScriptedProvider::default();
    let agents = vec![
        test_agent(AgentRole::new("Twin", "g", "b"), &provider),
        test_agent(AgentRole::new("Twin", "g2", "b2"), &provider),
    ];
    let tasks = vec![Task::new("d", "e", "Twin")];
    assert!(matches!(Crew::new(agents, tasks, 0), Err(CrewError::DuplicateAgent(name)) if name == "Twin"));
}

#[test]
fn test_agents_may_own_no_tasks() {
    let provider = ScriptedProvider::default();
    let agents = vec![
        test_agent(AgentRole::new("Worker", "g", "b"), &provider),
        test_agent(AgentRole::new("Idle", "g", "b"), &provider),
    ];
    let crew = Crew::new(agents, vec![Task::new("d", "e", "Worker")], 1).unwrap();
    assert_eq!(crew.agents().len(), 2);
    assert_eq!(crew.tasks().len(), 1);
    assert_eq!(crew.verbose(), 1);
}

#[tokio::test]
async fn test_kickoff_runs_tasks_in_order_and_chains_context() {
    let provider = ScriptedProvider::new(["- fact one\n- fact two", "The finished post"]);
    let crew = two_stage_crew(&provider);

    let output = crew.kickoff(&inputs("tidal power")).await.unwrap();

    assert_eq!(output.result, KickoffOutput::Text("The finished post".to_string()));
    assert_eq!(output.tasks_output.len(), 2);
    assert_eq!(output.tasks_output[0].agent, "Researcher");
    assert_eq!(output.tasks_output[0].description, "Collect facts about tidal power");
    assert_eq!(output.tasks_output[1].agent, "Author");
    assert_eq!(output.token_usage.total_tokens, 30);

    let requests = provider.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].messages[0].content.contains("Research tidal power"));
    assert!(requests[1].messages[0].content.contains("Write about tidal power"));
    assert!(requests[1].messages[1].content.contains("- fact one\n- fact two"));
}

#[tokio::test]
async fn test_kickoff_fails_on_missing_input() {
    let provider = ScriptedProvider::new(["unused"]);
    let crew = two_stage_crew(&provider);

    let err = crew.kickoff(&Inputs::new()).await.unwrap_err();
    assert!(matches!(err, CrewError::Template(TemplateError::MissingInput(ref key)) if key == "topic"));
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn test_kickoff_stops_at_first_failing_stage() {
    let provider = ScriptedProvider::default();
    provider.push_reply("facts");
    provider.push_failure(500);
    let crew = two_stage_crew(&provider);

    let err = crew.kickoff(&inputs("AI")).await.unwrap_err();
    match err {
        CrewError::Agent { agent, source } => {
            assert_eq!(agent, "Author");
            assert!(matches!(source, AgentError::Llm(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(provider.requests().len(), 2);
}

#[tokio::test]
async fn test_json_final_task_gives_structured_result() {
    let provider = ScriptedProvider::new(["notes", "{\"title\": \"Tides\", \"body\": \"...\"}"]);
    let agents = vec![
        test_agent(AgentRole::new("Researcher", "r", "b"), &provider),
        test_agent(AgentRole::new("Author", "a", "b"), &provider),
    ];
    let tasks = vec![
        Task::new("Research", "notes", "Researcher"),
        Task::new("Write", "post", "Author").with_simple_json(
            vec![
                ("title".to_string(), JsonFieldType::String),
                ("body".to_string(), JsonFieldType::String),
            ],
            true,
        ),
    ];
    let crew = Crew::new(agents, tasks, 0).unwrap();

    let output = crew.kickoff(&Inputs::new()).await.unwrap();
    match output.result {
        KickoffOutput::Structured(value) => assert_eq!(value["title"], "Tides"),
        KickoffOutput::Text(text) => panic!("expected structured output, got text {text}"),
    }
}
