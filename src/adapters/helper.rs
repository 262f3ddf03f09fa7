//! The `simple_pagination_render` template function.

use minijinja::value::{Kwargs, Rest};
use minijinja::{Environment, Error, ErrorKind, State, Value};

use crate::app::PaginationExtension;
use crate::domain::RenderRequest;

/// Name under which the helper is visible to templates.
pub const SIMPLE_PAGINATION_RENDER: &str = "simple_pagination_render";

/// Argument names in positional order; also accepted as keywords.
const ARGUMENT_NAMES: [&str; 5] =
    ["pagination", "routeName", "pageParameterName", "queryParameters", "template"];

pub(crate) fn register(env: &mut Environment<'_>, extension: PaginationExtension) {
    env.add_function(
        SIMPLE_PAGINATION_RENDER,
        move |state: &State, args: Rest<Value>| -> Result<Value, Error> {
            let request = parse_call(args.0)?;
            let rendered = extension.attach(state.env()).render(&request)?;
            Ok(Value::from_safe_string(rendered))
        },
    );
}

/// Turn a template call into a [`RenderRequest`].
///
/// `none` or undefined in an optional slot selects that slot's default.
fn parse_call(values: Vec<Value>) -> Result<RenderRequest, Error> {
    let mut args = CallArguments::new(values)?;

    let pagination = required(args.next(ARGUMENT_NAMES[0])?, ARGUMENT_NAMES[0])?;
    let route_name = required(args.next(ARGUMENT_NAMES[1])?, ARGUMENT_NAMES[1])?;
    let route_name = string(route_name, ARGUMENT_NAMES[1])?;
    let page_parameter_name = args.next(ARGUMENT_NAMES[2])?;
    let query_parameters = args.next(ARGUMENT_NAMES[3])?;
    let template = args.next(ARGUMENT_NAMES[4])?;
    args.finish()?;

    let mut request = RenderRequest::from_value(pagination, route_name);
    if let Some(name) = page_parameter_name {
        request = request.with_page_parameter_name(string(name, ARGUMENT_NAMES[2])?);
    }
    if let Some(parameters) = query_parameters {
        request = request.with_query_parameters_value(parameters);
    }
    if let Some(template) = template {
        request = request.with_template(string(template, ARGUMENT_NAMES[4])?);
    }
    Ok(request)
}

struct CallArguments {
    positional: std::vec::IntoIter<Value>,
    kwargs: Option<Kwargs>,
}

impl CallArguments {
    fn new(mut values: Vec<Value>) -> Result<Self, Error> {
        let kwargs = if values.last().is_some_and(Value::is_kwargs) {
            values.pop().map(Kwargs::try_from).transpose()?
        } else {
            None
        };

        if values.len() > ARGUMENT_NAMES.len() {
            return Err(Error::new(
                ErrorKind::TooManyArguments,
                format!(
                    "{} takes at most {} arguments, got {}",
                    SIMPLE_PAGINATION_RENDER,
                    ARGUMENT_NAMES.len(),
                    values.len()
                ),
            ));
        }

        Ok(Self { positional: values.into_iter(), kwargs })
    }

    /// Take the next positional argument, or the keyword argument `name`.
    fn next(&mut self, name: &str) -> Result<Option<Value>, Error> {
        let by_keyword = match &self.kwargs {
            Some(kwargs) if kwargs.has(name) => Some(kwargs.get::<Value>(name)?),
            _ => None,
        };

        match (self.positional.next(), by_keyword) {
            (Some(_), Some(_)) => Err(Error::new(
                ErrorKind::TooManyArguments,
                format!("argument '{}' given both by position and by keyword", name),
            )),
            (value, None) | (None, value) => {
                Ok(value.filter(|value| !value.is_none() && !value.is_undefined()))
            }
        }
    }

    fn finish(self) -> Result<(), Error> {
        match &self.kwargs {
            Some(kwargs) => kwargs.assert_all_used(),
            None => Ok(()),
        }
    }
}

fn required(value: Option<Value>, name: &str) -> Result<Value, Error> {
    value.ok_or_else(|| {
        Error::new(ErrorKind::MissingArgument, format!("missing argument '{}'", name))
    })
}

fn string(value: Value, name: &str) -> Result<String, Error> {
    match value.as_str() {
        Some(text) => Ok(text.to_string()),
        None => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("argument '{}' must be a string, got {}", name, value.kind()),
        )),
    }
}
