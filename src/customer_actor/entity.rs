//! [`ActorEntity`] implementation for [`Customer`].

use actor_framework::ActorEntity;
use async_trait::async_trait;

use super::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.email))
    }

    /// Rejects customers without a name or with an email lacking `@`.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        validate(&self.name, &self.email)
    }

    /// Applies the fields present in the update, then re-validates.
    async fn on_update(
        &mut self,
        update: CustomerUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        let name = update.name.unwrap_or_else(|| self.name.clone());
        let email = update.email.unwrap_or_else(|| self.email.clone());
        validate(&name, &email)?;
        self.name = name;
        self.email = email;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn validate(name: &str, email: &str) -> Result<(), CustomerError> {
    if name.trim().is_empty() {
        return Err(CustomerError::ValidationError("name must not be empty".into()));
    }
    if !email.contains('@') {
        return Err(CustomerError::ValidationError(format!(
            "invalid email address: {email}"
        )));
    }
    Ok(())
}
