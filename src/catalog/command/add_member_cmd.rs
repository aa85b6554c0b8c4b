use serde::Serialize;
use crate::catalog::domain::LibraryService;
use crate::core::command::{parse_age, Command, CommandError};
use crate::parties::domain::model::MemberEntity;

pub struct AddMemberCommand<'a> {
    library: &'a mut dyn LibraryService,
}

impl<'a> AddMemberCommand<'a> {
    pub fn new(library: &'a mut dyn LibraryService) -> Self {
        Self {
            library,
        }
    }
}

#[derive(Debug)]
pub struct AddMemberCommandRequest {
    pub name: String,
    pub age: u32,
}

impl AddMemberCommandRequest {
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }

    // builds the request from raw console input
    pub fn parse(name: &str, age: &str) -> Result<Self, CommandError> {
        Ok(Self::new(name, parse_age(age)?))
    }
}

#[derive(Debug, Serialize)]
pub struct AddMemberCommandResponse {
    pub member: MemberEntity,
}

impl Command<AddMemberCommandRequest, AddMemberCommandResponse> for AddMemberCommand<'_> {
    fn execute(&mut self, req: AddMemberCommandRequest) -> Result<AddMemberCommandResponse, CommandError> {
        self.library.add_member(req.name.as_str(), req.age)
            .map_err(CommandError::from).map(|member| AddMemberCommandResponse { member: member.clone() })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_member_cmd::{AddMemberCommand, AddMemberCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_run_add_member() {
        let mut library = factory::create_library_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let req = AddMemberCommandRequest::parse("Alice", "30").expect("should parse");
        let res = AddMemberCommand::new(library.as_mut()).execute(req).expect("should add member");
        assert_eq!(1, res.member.member_id);
        assert_eq!(30, res.member.person.age);
        assert_eq!(5, res.member.max_issued_books);
    }

    #[test]
    fn test_should_reject_bad_age() {
        let res = AddMemberCommandRequest::parse("Alice", "old");
        assert!(matches!(res, Err(CommandError::Validation { reason_code: Some(ref code), .. }) if code == "age"));
    }

    #[test]
    fn test_should_reject_blank_name() {
        let mut library = factory::create_library_service(&Configuration::new("test"), GatewayPublisherVia::Memory);
        let req = AddMemberCommandRequest::parse(" ", "30").expect("should parse");
        let res = AddMemberCommand::new(library.as_mut()).execute(req);
        assert!(matches!(res, Err(CommandError::Validation { reason_code: Some(ref code), .. }) if code == "name"));
        assert!(library.members().is_empty());
    }
}
